mod article;
mod contact;
mod gallery;
mod member;
mod newsletter;
mod order;
mod plan;
mod publication;
mod stats;
mod subscription;

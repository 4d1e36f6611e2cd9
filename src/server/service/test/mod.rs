mod newsletter;
mod order;
mod plan;

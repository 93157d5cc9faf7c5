mod concurrency;
mod registry;

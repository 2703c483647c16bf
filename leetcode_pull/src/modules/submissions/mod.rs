pub mod crawler;
pub mod fetcher;
pub mod filter;

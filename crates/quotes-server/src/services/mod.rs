//! Business logic services

pub mod authors;
pub mod quotes;

pub use authors::AuthorService;
pub use quotes::QuoteService;

//! bloglist - statistics over blog lists.
//!
//! The [`analysis`] module holds the pure aggregation functions. The rest
//! of the crate loads blog lists, renders reports and backs the
//! `bloglist` binary.
//!
//! ```
//! use bloglist::analysis::{favorite_blog, most_blogs, most_likes, total_likes};
//! use bloglist::models::BlogPost;
//!
//! let posts = vec![
//!     BlogPost::new("A", "X", "https://a.example", 5),
//!     BlogPost::new("B", "Y", "https://b.example", 10),
//!     BlogPost::new("C", "X", "https://c.example", 10),
//! ];
//!
//! assert_eq!(total_likes(&posts), 25);
//! assert_eq!(favorite_blog(&posts).unwrap().title, "B");
//! assert_eq!(most_blogs(&posts).blogs, 2);
//! assert_eq!(most_likes(&posts).likes, 15);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod source;

pub use error::{Error, Result};

//! Blog-list aggregation and statistics.
//!
//! Every function here is a pure reduction over an ordered slice of
//! posts. Authors are grouped by exact string equality, and ties always
//! go to whichever post or author appears first in the input.

use crate::error::{Error, Result};
use crate::models::{AuthorLikes, AuthorSummary, AuthorTotal, BlogPost, BlogStats, FavoriteBlog};
use std::collections::HashMap;

/// Sum of likes across all posts. Zero for an empty slice.
pub fn total_likes(posts: &[BlogPost]) -> i64 {
    posts.iter().map(|p| p.likes).sum()
}

/// The post with the most likes.
///
/// The first post reaching the maximum wins. An empty slice has no
/// favorite and yields [`Error::InvalidArgument`].
pub fn favorite_blog(posts: &[BlogPost]) -> Result<FavoriteBlog> {
    let (first, rest) = posts
        .split_first()
        .ok_or(Error::InvalidArgument("favorite_blog requires at least one post"))?;

    let top = rest
        .iter()
        .fold(first, |best, post| if post.likes > best.likes { post } else { best });

    Ok(FavoriteBlog::from(top))
}

/// The author with the most posts.
///
/// Returns `{ author: "", blogs: 0 }` for an empty slice.
pub fn most_blogs(posts: &[BlogPost]) -> AuthorTotal {
    author_breakdown(posts)
        .into_iter()
        .fold(AuthorTotal::default(), |best, row| {
            if row.blogs > best.blogs {
                AuthorTotal {
                    author: row.author,
                    blogs: row.blogs,
                }
            } else {
                best
            }
        })
}

/// The author whose posts have the most likes in total.
///
/// Returns `{ author: "", likes: 0 }` for an empty slice. The reduction
/// starts from that identity, so an author only wins with a positive sum.
pub fn most_likes(posts: &[BlogPost]) -> AuthorLikes {
    author_breakdown(posts)
        .into_iter()
        .fold(AuthorLikes::default(), |best, row| {
            if row.likes > best.likes {
                AuthorLikes {
                    author: row.author,
                    likes: row.likes,
                }
            } else {
                best
            }
        })
}

/// Post count and like total per author, in order of first appearance.
pub fn author_breakdown(posts: &[BlogPost]) -> Vec<AuthorSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<AuthorSummary> = Vec::new();

    for post in posts {
        let slot = *index.entry(post.author.as_str()).or_insert_with(|| {
            rows.push(AuthorSummary {
                author: post.author.clone(),
                blogs: 0,
                likes: 0,
            });
            rows.len() - 1
        });

        let row = &mut rows[slot];
        row.blogs += 1;
        row.likes += post.likes;
    }

    rows
}

/// The `n` authors with the most likes.
///
/// Equal like totals keep their first-appearance order.
pub fn top_authors(breakdown: &[AuthorSummary], n: usize) -> Vec<AuthorSummary> {
    let mut sorted = breakdown.to_vec();
    sorted.sort_by_key(|row| std::cmp::Reverse(row.likes));
    sorted.truncate(n);
    sorted
}

/// Compute every headline statistic for a blog list.
pub fn compute_stats(posts: &[BlogPost]) -> BlogStats {
    BlogStats {
        post_count: posts.len(),
        total_likes: total_likes(posts),
        favorite_blog: favorite_blog(posts).ok(),
        most_blogs: most_blogs(posts),
        most_likes: most_likes(posts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, author: &str, likes: i64) -> BlogPost {
        BlogPost::new(title, author, format!("https://example.com/{}", title), likes)
    }

    fn fixture_posts() -> Vec<BlogPost> {
        serde_json::from_str(include_str!("../../fixtures/blogs.json")).unwrap()
    }

    fn mixed_posts() -> Vec<BlogPost> {
        vec![post("A", "X", 5), post("B", "Y", 10), post("C", "X", 10)]
    }

    #[test]
    fn test_total_likes() {
        assert_eq!(total_likes(&[]), 0);
        assert_eq!(total_likes(&[post("A", "X", 5)]), 5);
        assert_eq!(total_likes(&mixed_posts()), 25);
        assert_eq!(total_likes(&fixture_posts()), 36);
    }

    #[test]
    fn test_total_likes_sums_negative_values() {
        let posts = vec![post("A", "X", 4), post("B", "Y", -3)];
        assert_eq!(total_likes(&posts), 1);
    }

    #[test]
    fn test_favorite_blog_first_maximum_wins() {
        let favorite = favorite_blog(&mixed_posts()).unwrap();
        assert_eq!(
            favorite,
            FavoriteBlog {
                title: "B".to_string(),
                author: "Y".to_string(),
                likes: 10,
            }
        );
    }

    #[test]
    fn test_favorite_blog_fixture() {
        let favorite = favorite_blog(&fixture_posts()).unwrap();
        assert_eq!(favorite.title, "Canonical string reduction");
        assert_eq!(favorite.author, "Edsger W. Dijkstra");
        assert_eq!(favorite.likes, 12);
    }

    #[test]
    fn test_favorite_blog_all_negative() {
        let posts = vec![post("A", "X", -5), post("B", "Y", -1), post("C", "Z", -1)];
        let favorite = favorite_blog(&posts).unwrap();
        assert_eq!(favorite.title, "B");
        assert_eq!(favorite.likes, -1);
    }

    #[test]
    fn test_favorite_blog_empty_is_invalid_argument() {
        assert!(matches!(favorite_blog(&[]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_most_blogs() {
        assert_eq!(
            most_blogs(&mixed_posts()),
            AuthorTotal {
                author: "X".to_string(),
                blogs: 2,
            }
        );
        assert_eq!(
            most_blogs(&fixture_posts()),
            AuthorTotal {
                author: "Robert C. Martin".to_string(),
                blogs: 3,
            }
        );
    }

    #[test]
    fn test_most_blogs_empty() {
        assert_eq!(most_blogs(&[]), AuthorTotal::default());
        assert_eq!(most_blogs(&[]).author, "");
    }

    #[test]
    fn test_most_blogs_tie_goes_to_first_author() {
        let posts = vec![
            post("A", "Y", 1),
            post("B", "X", 1),
            post("C", "X", 1),
            post("D", "Y", 1),
        ];
        assert_eq!(most_blogs(&posts).author, "Y");
    }

    #[test]
    fn test_most_likes() {
        assert_eq!(
            most_likes(&mixed_posts()),
            AuthorLikes {
                author: "X".to_string(),
                likes: 15,
            }
        );
        assert_eq!(
            most_likes(&fixture_posts()),
            AuthorLikes {
                author: "Edsger W. Dijkstra".to_string(),
                likes: 17,
            }
        );
    }

    #[test]
    fn test_most_likes_empty_and_non_positive() {
        assert_eq!(most_likes(&[]), AuthorLikes::default());

        let posts = vec![post("A", "X", 0), post("B", "Y", -2)];
        assert_eq!(most_likes(&posts), AuthorLikes::default());
    }

    #[test]
    fn test_most_likes_tie_goes_to_first_author() {
        let posts = vec![post("A", "Y", 3), post("B", "X", 6), post("C", "Y", 3)];
        assert_eq!(most_likes(&posts).author, "Y");
        assert_eq!(most_likes(&posts).likes, 6);
    }

    #[test]
    fn test_authors_are_case_sensitive() {
        let posts = vec![post("A", "x", 4), post("B", "X", 3), post("C", "X", 3)];
        assert_eq!(most_blogs(&posts).author, "X");
        assert_eq!(most_likes(&posts).likes, 6);
        assert_eq!(author_breakdown(&posts).len(), 2);
    }

    #[test]
    fn test_author_breakdown_order() {
        let breakdown = author_breakdown(&fixture_posts());
        let authors: Vec<&str> = breakdown.iter().map(|r| r.author.as_str()).collect();
        assert_eq!(
            authors,
            vec!["Michael Chan", "Edsger W. Dijkstra", "Robert C. Martin"]
        );
        assert_eq!(breakdown[2].blogs, 3);
        assert_eq!(breakdown[2].likes, 12);
    }

    #[test]
    fn test_top_authors() {
        let breakdown = author_breakdown(&fixture_posts());
        let top = top_authors(&breakdown, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].author, "Edsger W. Dijkstra");
        assert_eq!(top[1].author, "Robert C. Martin");
    }

    #[test]
    fn test_top_authors_stable_on_ties() {
        let posts = vec![post("A", "Y", 2), post("B", "X", 2), post("C", "Z", 1)];
        let top = top_authors(&author_breakdown(&posts), 3);
        assert_eq!(top[0].author, "Y");
        assert_eq!(top[1].author, "X");
        assert_eq!(top[2].author, "Z");
    }

    #[test]
    fn test_compute_stats() {
        let stats = compute_stats(&mixed_posts());
        assert_eq!(stats.post_count, 3);
        assert_eq!(stats.total_likes, 25);
        assert_eq!(stats.favorite_blog.map(|f| f.title), Some("B".to_string()));
        assert_eq!(stats.most_blogs.blogs, 2);
        assert_eq!(stats.most_likes.likes, 15);

        let empty = compute_stats(&[]);
        assert_eq!(empty.post_count, 0);
        assert!(empty.favorite_blog.is_none());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let posts = fixture_posts();
        let before = posts.clone();

        assert_eq!(compute_stats(&posts), compute_stats(&posts));
        assert_eq!(posts, before);
    }
}

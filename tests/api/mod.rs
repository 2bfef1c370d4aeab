mod comment_tests;
mod health_tests;
mod post_tests;

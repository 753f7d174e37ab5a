pub mod feed_testkit;

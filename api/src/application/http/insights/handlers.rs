pub mod get_insights;

pub mod usage_line;

pub mod json_parser;

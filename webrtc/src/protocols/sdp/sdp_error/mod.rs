pub mod grammar_error;

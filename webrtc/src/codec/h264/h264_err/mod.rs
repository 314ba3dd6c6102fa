pub mod profile_level_err;

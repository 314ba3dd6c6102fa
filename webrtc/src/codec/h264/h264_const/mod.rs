pub mod profile_level_const;

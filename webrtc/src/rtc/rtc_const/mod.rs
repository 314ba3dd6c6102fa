pub mod codec_const;

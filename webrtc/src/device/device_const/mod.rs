pub mod device_err_const;

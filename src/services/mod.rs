pub mod device_api;

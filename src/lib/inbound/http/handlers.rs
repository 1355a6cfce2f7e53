pub mod get_device;
pub mod health;
pub mod patch_device;
pub mod register_device;

pub mod declared_license;

pub use declared_license::DeclaredLicensePolicy;

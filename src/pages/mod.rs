//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetch-render-mutate cycle against the REST client and
//! delegates chrome (header, menu, banners, pagers) to `components`. Nothing
//! is cached across navigations; every mount re-fetches.

pub mod gate_control;
pub mod guest;
pub mod history;
pub mod license_plates;
pub mod login;
pub mod parking;
pub mod temp_access;
pub mod temp_access_form;

mod portal;

pub use portal::PortalPage;

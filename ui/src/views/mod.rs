mod mobile;
pub use mobile::MobileNotice;

mod timeline;
pub use timeline::TimelinePage;

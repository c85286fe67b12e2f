mod health;
mod thumbnail_upload;
mod video_create;
mod video_delete;
mod video_get;
mod video_upload;

pub use health::health;
pub use thumbnail_upload::upload_thumbnail;
pub use video_create::create_video;
pub use video_delete::delete_video;
pub use video_get::{get_video, list_videos};
pub use video_upload::upload_video;

mod requests;
mod responses;

pub use requests::{
    AddCommentRequest, CreateBlogRequest, LoginRequest, SignupRequest, UpdateLikesRequest,
};
pub use responses::{BlogRef, BlogResponse, LoginResponse, UserRef, UserResponse};

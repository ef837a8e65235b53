// Response bodies
pub const REGISTERED_MESSAGE: &str = "User registered";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";
pub const USER_EXISTS_MESSAGE: &str = "User already exists";

// Password hashing
pub const DEFAULT_BCRYPT_COST: u32 = 10;

// Gravatar
pub const DEFAULT_AVATAR_BASE_URL: &str = "//www.gravatar.com/avatar";
pub const AVATAR_SIZE: u16 = 200;
pub const AVATAR_RATING: &str = "pg";
pub const AVATAR_DEFAULT_IMAGE: &str = "mm";

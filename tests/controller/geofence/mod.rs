mod center;
mod route;
mod zone;

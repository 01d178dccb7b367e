mod requests;
mod status;

mod common;
mod request;
mod routing;

mod api;
mod identity;

pub mod use_view_handle;

pub mod handler_404;
pub mod validated_json;

mod health_check;
mod submit;

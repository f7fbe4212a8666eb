//! Todo Web Entry Point

fn main() {
    todo_web::run();
}

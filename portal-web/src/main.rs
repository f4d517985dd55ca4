fn main() {
    dioxus::launch(portal_web::App);
}

fn main() {
    kitsetup::app::cli::run();
}

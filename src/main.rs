fn main() {
    clinprompt::app::cli::run();
}

use headline_comparer;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the headline comparer
    headline_comparer::run_app()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    radiosync::runtime::run()
}

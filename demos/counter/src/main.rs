use kobold_counter::Config;

fn main() {
    kobold_counter::start(Config::default());
}

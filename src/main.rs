fn main() {
    planets::run();
}

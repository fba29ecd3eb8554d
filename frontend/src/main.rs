fn main() {
    customers_frontend::start();
}

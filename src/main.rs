fn main() {
    chess_rules::protocol::run_loop();
}

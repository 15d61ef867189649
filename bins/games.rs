fn main() -> std::process::ExitCode {
    server::bootstrap::main_for(server::ServiceKind::Games)
}

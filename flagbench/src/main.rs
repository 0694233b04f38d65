fn main() -> anyhow::Result<()> {
    flagbench::run()
}

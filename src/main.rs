fn main() -> anyhow::Result<()> {
    poem_narrator_lib::run()
}

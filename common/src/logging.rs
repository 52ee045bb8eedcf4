pub fn init_fern_logger()->Result<(), fern::InitError>{
    let fern_logger = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S.%f]"),
                record.level(),
                message
            ))
        })
        .chain(std::io::stdout())
        .chain(fern::log_file("shoreline.log")?);

    fern_logger.apply()?;
    log::info!("Initialized the logger successfully, writing to shoreline.log");

    Ok(())
}

/***************************************/
/*               Macros                */
/***************************************/
/// Fatal path of the binary: yields the `Ok` value, or logs the config, dispatch or
/// thread spawn error and exits with status 1.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}, exiting", e);
                std::process::exit(1);
            }
        }
    };
}

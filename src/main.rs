// SPDX-License-Identifier: MPL-2.0
use iced_courier::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        server_url: args.opt_value_from_str("--server").unwrap(),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}

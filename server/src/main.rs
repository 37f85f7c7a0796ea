#[macro_use]
extern crate rocket;

#[macro_use]
extern crate log;

mod webserver;

#[cfg(test)]
mod test_helpers;

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let _ = dotenv::dotenv();

    webserver::main().await
}

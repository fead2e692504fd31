use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    /// MongoDB connection string
    #[clap(env, long)]
    pub mongo_uri: String,

    #[clap(env, long, default_value = "mydb")]
    pub database_name: String,

    #[clap(env, long, default_value = "reservations")]
    pub collection_name: String,

    /// `*` for any origin, otherwise a comma separated list of origins
    #[clap(env, long, default_value = "*")]
    pub origin_urls: String,

    #[clap(env, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub bind_address: IpAddr,

    #[clap(env, long, default_value_t = 8000)]
    pub port: u16,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

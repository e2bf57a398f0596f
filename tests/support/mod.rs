pub mod cropyield_env;

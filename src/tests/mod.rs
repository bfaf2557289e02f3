mod defaults;
mod equality;
mod stamp;

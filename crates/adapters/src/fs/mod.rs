mod scanner;

pub use scanner::WalkdirImageSource;

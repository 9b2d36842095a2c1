mod native_random;

pub use native_random::NativeRandom;

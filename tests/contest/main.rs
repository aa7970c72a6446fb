mod decay;
mod scenario;

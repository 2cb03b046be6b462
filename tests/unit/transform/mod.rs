mod kernels;
mod range;

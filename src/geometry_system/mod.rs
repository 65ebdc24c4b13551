pub mod contour;

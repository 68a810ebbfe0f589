pub mod stability_generate_images_response;

//! Handlers for the product catalog.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use shopshare_core::catalog::ProductDraft;
use shopshare_core::error::CoreError;
use shopshare_core::uploads::MAX_GALLERY_IMAGES;
use shopshare_core::validation::finish;
use shopshare_db::models::product::{CreateProduct, Product};
use shopshare_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::uploads::{
    accept_image, discard_uploads, read_form, store_images, AcceptedImage, UploadedFile,
};

const THUMBNAIL_FIELD: &str = "thumbnail";
const GALLERY_FIELD: &str = "images";

/// POST /api/v2/product/add-new-product
///
/// Multipart product creation. Every failing field is reported together and
/// nothing is written to disk unless the whole form is valid. Stored images
/// are removed again if the insert fails.
pub async fn add_new_product(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let mut form = read_form(&mut multipart, &[THUMBNAIL_FIELD, GALLERY_FIELD]).await?;
    let thumbnail_text = form.take(THUMBNAIL_FIELD).filter(|v| !v.trim().is_empty());

    let mut errors = Vec::new();
    let draft = match ProductDraft::from_form(&form.fields) {
        Ok(draft) => Some(draft),
        Err(CoreError::InvalidFields(found)) => {
            errors.extend(found);
            None
        }
        Err(other) => return Err(other.into()),
    };

    let thumbnail_files: Vec<&UploadedFile> = form.files_named(THUMBNAIL_FIELD).collect();
    if thumbnail_files.len() > 1 {
        errors.push(format!("{THUMBNAIL_FIELD}: only one file is allowed"));
    }
    let gallery_files: Vec<&UploadedFile> = form.files_named(GALLERY_FIELD).collect();
    if gallery_files.len() > MAX_GALLERY_IMAGES {
        errors.push(format!(
            "{GALLERY_FIELD}: at most {MAX_GALLERY_IMAGES} files are allowed"
        ));
    }

    let thumbnails = accept_all(&thumbnail_files, &mut errors);
    let gallery = accept_all(&gallery_files, &mut errors);

    errors.sort();
    errors.dedup();
    finish(errors)?;
    let Some(draft) = draft else {
        return Err(CoreError::Internal("product draft missing after validation".into()).into());
    };

    let upload_dir = &state.config.upload_dir;
    let stored_thumbnail = store_images(upload_dir, &thumbnails).await?;
    let images = match store_images(upload_dir, &gallery).await {
        Ok(images) => images,
        Err(err) => {
            discard_uploads(upload_dir, &stored_thumbnail).await;
            return Err(err);
        }
    };
    let mut stored = stored_thumbnail.clone();
    stored.extend(images.iter().cloned());
    let thumbnail = stored_thumbnail.into_iter().next().or(thumbnail_text);

    let is_in_stock = draft.resolved_in_stock();
    let input = CreateProduct {
        name: draft.name,
        description: draft.description,
        category: draft.category,
        sub_category: draft.sub_category,
        size: draft.size,
        price: draft.price,
        original_price: draft.original_price,
        discount: draft.discount,
        currency: draft.currency,
        stock: draft.stock,
        is_in_stock,
        brand: draft.brand,
        images,
        thumbnail,
        ratings: draft.ratings,
        reviews_count: draft.reviews_count,
        is_featured: draft.is_featured,
        seller: draft.seller,
        return_policy: draft.return_policy,
        warranty: draft.warranty,
    };

    let product = match ProductRepo::create(&state.pool, &input).await {
        Ok(product) => product,
        Err(err) => {
            discard_uploads(upload_dir, &stored).await;
            return Err(err.into());
        }
    };
    tracing::info!(
        product_id = product.id,
        admin_id = admin.user_id,
        images = product.images.len(),
        "Product created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Product added successfully", product)),
    ))
}

/// GET /api/v2/product/get-all-products
///
/// The whole catalog in insertion order. Public.
pub async fn get_all_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = ProductRepo::list_all(&state.pool).await?;
    Ok(Json(ApiResponse::ok(
        "Products retrieved successfully",
        products,
    )))
}

/// Run the image rules over every file, collecting rejections into `errors`.
fn accept_all(files: &[&UploadedFile], errors: &mut Vec<String>) -> Vec<AcceptedImage> {
    let mut accepted = Vec::with_capacity(files.len());
    for file in files {
        match accept_image(file) {
            Ok(image) => accepted.push(image),
            Err(CoreError::Validation(msg)) => errors.push(msg),
            Err(CoreError::InvalidFields(found)) => errors.extend(found),
            Err(other) => errors.push(other.to_string()),
        }
    }
    accepted
}
